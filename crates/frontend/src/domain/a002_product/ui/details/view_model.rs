use super::model::{self, ProductForm};
use crate::shared::api::RestApi;
use crate::shared::notifications::NotificationCenter;
use contracts::domain::a001_room_category::aggregate::RoomCategory;
use contracts::domain::a002_product::aggregate::Product;
use contracts::shared::list_view::Notifier;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub id: StoredValue<Option<String>>,
    pub form: RwSignal<ProductForm>,
    /// (id, name) для select категории
    pub categories: RwSignal<Vec<(String, String)>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    api: RestApi<Product>,
    categories_api: RestApi<RoomCategory>,
}

impl ProductDetailsViewModel {
    pub fn new(
        api: RestApi<Product>,
        categories_api: RestApi<RoomCategory>,
        id: Option<String>,
    ) -> Self {
        Self {
            id: StoredValue::new(id),
            form: RwSignal::new(ProductForm::default()),
            categories: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            api,
            categories_api,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.with_value(Option::is_some)
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| f.to_dto().is_ok())
    }

    pub fn load(&self) {
        let this = *self;
        spawn_local(async move {
            match model::fetch_categories(this.categories_api).await {
                Ok(rows) => {
                    this.categories
                        .try_set(rows.into_iter().map(|c| (c.id, c.name)).collect());
                }
                Err(e) => log::warn!("categories are unavailable: {}", e),
            }
        });

        let Some(existing_id) = self.id.get_value() else {
            return;
        };
        this.loading.set(true);
        spawn_local(async move {
            match model::fetch_by_id(this.api, &existing_id).await {
                Ok(product) => {
                    this.form.try_set(ProductForm::from_record(&product));
                }
                Err(e) => {
                    this.error.try_set(Some(format!("Failed to load: {}", e)));
                }
            }
            this.loading.try_set(false);
        });
    }

    pub fn save_command(&self, notifier: NotificationCenter, on_saved: Callback<()>) {
        let dto = match self.form.with_untracked(ProductForm::to_dto) {
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
                Ok(product) => {
                    log::info!("product {} saved", product.id);
                    let verb = if id.is_some() { "updated" } else { "created" };
                    notifier.success(&format!("Product {} successfully!", verb));
                    on_saved.run(());
                }
                Err(e) => {
                    notifier.error("Failed to update product. Please try again.");
                    this.error.try_set(Some(e));
                }
            }
        });
    }
}
