use super::model::ProductForm;
use super::view_model::ProductDetailsViewModel;
use crate::shared::api::RestApi;
use crate::shared::components::form_field::{FormCheckbox, FormField};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::system::auth::context::use_session;
use leptos::prelude::*;

#[component]
pub fn ProductDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let notifications = use_notifications();
    let session = use_session();
    let vm = ProductDetailsViewModel::new(RestApi::new(session), RestApi::new(session), id);
    vm.load();

    view! {
        <PageFrame entity="a002_product" category=PageCategory::Detail>
            <div class="details-container">
                <div class="details-header">
                    <h3>{if vm.is_edit_mode() { "Edit Product" } else { "New Product" }}</h3>
                </div>

                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}
                <Show when=move || vm.loading.get()>
                    <div class="details-loading">"Loading..."</div>
                </Show>

                <div class="details-form">
                    <FormField
                        form=vm.form
                        id="product-name"
                        label="Name"
                        required=true
                        get=|f: &ProductForm| f.name.clone()
                        set=|f: &mut ProductForm, v| f.name = v
                    />
                    <FormField
                        form=vm.form
                        id="product-description"
                        label="Description"
                        multiline=true
                        get=|f: &ProductForm| f.description.clone()
                        set=|f: &mut ProductForm, v| f.description = v
                    />
                    <FormField
                        form=vm.form
                        id="product-price"
                        label="Price"
                        input_type="number"
                        required=true
                        get=|f: &ProductForm| f.price.clone()
                        set=|f: &mut ProductForm, v| f.price = v
                        placeholder="0"
                    />
                    <FormField
                        form=vm.form
                        id="product-stock"
                        label="Stock"
                        input_type="number"
                        get=|f: &ProductForm| f.stock.clone()
                        set=|f: &mut ProductForm, v| f.stock = v
                    />

                    <div class="form-group">
                        <label for="product-category">"Category"</label>
                        <select
                            id="product-category"
                            prop:value=move || vm.form.with(|f| f.category.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.category = value);
                            }
                        >
                            <option value="">"No category"</option>
                            {move || vm.categories.get().into_iter().map(|(cid, name)| {
                                let selected_id = cid.clone();
                                view! {
                                    <option
                                        value=cid
                                        selected=move || vm.form.with(|f| f.category == selected_id)
                                    >
                                        {name}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    <FormField
                        form=vm.form
                        id="product-image"
                        label="Image URL"
                        input_type="url"
                        get=|f: &ProductForm| f.image_url.clone()
                        set=|f: &mut ProductForm, v| f.image_url = v
                        placeholder="https://"
                    />
                    <FormCheckbox
                        form=vm.form
                        id="product-active"
                        label="Active"
                        get=|f: &ProductForm| f.is_active
                        set=|f: &mut ProductForm, v| f.is_active = v
                    />
                    <FormCheckbox
                        form=vm.form
                        id="product-new-arrival"
                        label="New Arrival"
                        get=|f: &ProductForm| f.new_arrival
                        set=|f: &mut ProductForm, v| f.new_arrival = v
                    />
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
