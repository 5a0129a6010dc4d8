use super::model::RoomCategoryForm;
use super::view_model::RoomCategoryDetailsViewModel;
use crate::shared::api::RestApi;
use crate::shared::components::form_field::FormField;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::system::auth::context::use_session;
use leptos::prelude::*;

/// Форма создания (`id = None`) или редактирования категории номеров
#[component]
pub fn RoomCategoryDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let notifications = use_notifications();
    let vm = RoomCategoryDetailsViewModel::new(RestApi::new(use_session()), id);
    vm.load_if_needed();

    let title = if vm.is_edit_mode() {
        "Edit Room Category"
    } else {
        "New Room Category"
    };

    view! {
        <PageFrame entity="a001_room_category" category=PageCategory::Detail>
            <div class="details-container">
                <div class="details-header">
                    <h3>{title}</h3>
                </div>

                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}
                <Show when=move || vm.loading.get()>
                    <div class="details-loading">"Loading..."</div>
                </Show>

                <div class="details-form">
                    <FormField
                        form=vm.form
                        id="room-name"
                        label="Name"
                        required=true
                        get=|f: &RoomCategoryForm| f.name.clone()
                        set=|f: &mut RoomCategoryForm, v| f.name = v
                        placeholder="Deluxe"
                    />
                    <FormField
                        form=vm.form
                        id="room-description"
                        label="Description"
                        multiline=true
                        get=|f: &RoomCategoryForm| f.description.clone()
                        set=|f: &mut RoomCategoryForm, v| f.description = v
                    />
                    <FormField
                        form=vm.form
                        id="room-price"
                        label="Price"
                        input_type="number"
                        required=true
                        get=|f: &RoomCategoryForm| f.price.clone()
                        set=|f: &mut RoomCategoryForm, v| f.price = v
                        placeholder="0"
                    />
                    <FormField
                        form=vm.form
                        id="room-occupancy"
                        label="Occupancy"
                        input_type="number"
                        required=true
                        get=|f: &RoomCategoryForm| f.occupancy.clone()
                        set=|f: &mut RoomCategoryForm, v| f.occupancy = v
                    />
                    <FormField
                        form=vm.form
                        id="room-image"
                        label="Image URL"
                        input_type="url"
                        get=|f: &RoomCategoryForm| f.image_url.clone()
                        set=|f: &mut RoomCategoryForm, v| f.image_url = v
                        placeholder="https://"
                    />
                    {move || {
                        let url = vm.form.with(|f| f.image_url.trim().to_string());
                        (!url.is_empty()).then(|| view! {
                            <img class="details-preview" src=url alt="Preview" />
                        })
                    }}
                </div>

                <div class="details-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| vm.save_command(notifications, on_close)
                        disabled=move || !vm.is_form_valid() || vm.saving.get()
                    >
                        {icon("save")}
                        {if vm.is_edit_mode() { "Save" } else { "Create" }}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| on_close.run(())>
                        {icon("x")}
                        "Cancel"
                    </button>
                </div>
            </div>
        </PageFrame>
    }
}
