use super::model::{self, RoomCategoryForm};
use crate::shared::api::RestApi;
use crate::shared::notifications::NotificationCenter;
use contracts::domain::a001_room_category::aggregate::RoomCategory;
use contracts::shared::list_view::Notifier;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel формы категории номеров
#[derive(Clone, Copy)]
pub struct RoomCategoryDetailsViewModel {
    pub id: StoredValue<Option<String>>,
    pub form: RwSignal<RoomCategoryForm>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    api: RestApi<RoomCategory>,
}

impl RoomCategoryDetailsViewModel {
    pub fn new(api: RestApi<RoomCategory>, id: Option<String>) -> Self {
        Self {
            id: StoredValue::new(id),
            form: RwSignal::new(RoomCategoryForm::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            api,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with_value(Option::is_some)
    }

    /// Tracked: кнопка сохранения активна только для валидной формы
    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| f.to_dto().is_ok())
    }

    pub fn load_if_needed(&self) {
        let Some(existing_id) = self.id.get_value() else {
            return;
        };
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            match model::fetch_by_id(this.api, &existing_id).await {
                Ok(room) => {
                    this.form.try_set(RoomCategoryForm::from_record(&room));
                }
                Err(e) => {
                    this.error.try_set(Some(format!("Failed to load: {}", e)));
                }
            }
            this.loading.try_set(false);
        });
    }

    pub fn save_command(&self, notifier: NotificationCenter, on_saved: Callback<()>) {
        let dto = match self.form.with_untracked(RoomCategoryForm::to_dto) {
            Ok(dto) => dto,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let this = *self;
        this.saving.set(true);
        this.error.set(None);
        let id = this.id.get_value();
        spawn_local(async move {
            let result = model::save_form(this.api, id.as_deref(), &dto).await;
            // Успешное сохранение закрывает таб, сигналы формы после этого недоступны
            this.saving.try_set(false);
            match result {
                Ok(room) => {
                    log::info!("room category {} saved", room.id);
                    let verb = if id.is_some() { "updated" } else { "created" };
                    notifier.success(&format!("Room category {} successfully!", verb));
                    on_saved.run(());
                }
                Err(e) => {
                    notifier.error("Failed to save room category");
                    this.error.try_set(Some(e));
                }
            }
        });
    }
}
