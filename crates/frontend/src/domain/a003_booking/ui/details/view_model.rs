use crate::shared::api::RestApi;
use crate::shared::notifications::NotificationCenter;
use contracts::domain::a003_booking::aggregate::{Booking, FIELD_PAYMENT_STATUS};
use contracts::shared::list_view::{toggle_flag, ListRecord, Notifier, RecordApi};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct BookingDetailsViewModel {
    pub id: StoredValue<String>,
    pub booking: RwSignal<Option<Booking>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    /// Запрос к серверу в процессе (оплата/удаление)
    pub busy: RwSignal<bool>,
    api: RestApi<Booking>,
}

impl BookingDetailsViewModel {
    pub fn new(api: RestApi<Booking>, id: String) -> Self {
        Self {
            id: StoredValue::new(id),
            booking: RwSignal::new(None),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            busy: RwSignal::new(false),
            api,
        }
    }

    pub fn load(&self, notifier: NotificationCenter) {
        let this = *self;
        let id = this.id.get_value();
        this.loading.set(true);
        spawn_local(async move {
            match this.api.get_by_id(&id).await {
                Ok(booking) => {
                    this.booking.try_set(Some(booking));
                }
                Err(e) => {
                    log::error!("booking {}: {}", id, e);
                    notifier.error("Failed to fetch booking details");
                    this.error.try_set(Some(e.to_string()));
                }
            }
            this.loading.try_set(false);
        });
    }

    pub fn toggle_payment_command(&self, notifier: NotificationCenter) {
        let Some(current) = self.booking.with_untracked(|b| b.as_ref().map(|b| b.payment_status))
        else {
            return;
        };
        let this = *self;
        let id = this.id.get_value();
        this.busy.set(true);
        spawn_local(async move {
            let toggled = toggle_flag::<Booking, _, _, _>(
                &this.api,
                &id,
                FIELD_PAYMENT_STATUS,
                !current,
                &notifier,
                |_, field, value| {
                    this.booking.try_update(|b| {
                        if let Some(b) = b {
                            b.set_flag(field, value);
                        }
                    });
                },
            )
            .await;
            // Ошибка уже показана через notifier
            if let Err(e) = toggled {
                log::debug!("booking {}: payment status unchanged: {}", id, e);
            }
            this.busy.try_set(false);
        });
    }

    pub fn delete_command(&self, notifier: NotificationCenter, on_deleted: Callback<()>) {
        let this = *self;
        let id = this.id.get_value();
        this.busy.set(true);
        spawn_local(async move {
            match this.api.delete(&id).await {
                Ok(()) => {
                    notifier.success("Booking deleted successfully!");
                    on_deleted.run(());
                }
                Err(e) => {
                    log::warn!("failed to delete booking {}: {}", id, e);
                    notifier.error("Failed to delete booking");
                    this.busy.try_set(false);
                }
            }
        });
    }
}
