use crate::shared::api::RestApi;
use contracts::domain::a001_room_category::aggregate::{RoomCategory, RoomCategoryDto};
use contracts::shared::list_view::RecordApi;

/// Состояние формы: числа хранятся текстом, пока пользователь печатает
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoomCategoryForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub occupancy: String,
    pub image_url: String,
}

impl RoomCategoryForm {
    pub fn new() -> Self {
        Self {
            occupancy: "1".to_string(),
            ..Default::default()
        }
    }

    pub fn from_record(room: &RoomCategory) -> Self {
        let dto = room.to_dto();
        Self {
            name: dto.name,
            description: dto.description,
            price: dto.price.to_string(),
            occupancy: dto.occupancy.to_string(),
            image_url: dto.image_url.unwrap_or_default(),
        }
    }

    /// Разбирает и валидирует форму
    pub fn to_dto(&self) -> Result<RoomCategoryDto, String> {
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .map_err(|_| "Price must be a number".to_string())?;
        let occupancy = self
            .occupancy
            .trim()
            .parse::<u32>()
            .map_err(|_| "Occupancy must be a whole number".to_string())?;
        let image_url = self.image_url.trim();
        let dto = RoomCategoryDto {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            occupancy,
            image_url: (!image_url.is_empty()).then(|| image_url.to_string()),
        };
        dto.validate()?;
        Ok(dto)
    }
}

pub async fn fetch_by_id(api: RestApi<RoomCategory>, id: &str) -> Result<RoomCategory, String> {
    api.get_by_id(id).await.map_err(|e| e.to_string())
}

pub async fn save_form(
    api: RestApi<RoomCategory>,
    id: Option<&str>,
    dto: &RoomCategoryDto,
) -> Result<RoomCategory, String> {
    let result = match id {
        Some(id) => api.update(id, dto).await,
        None => api.create(dto).await,
    };
    result.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RoomCategoryForm {
        RoomCategoryForm {
            name: " Deluxe ".into(),
            description: "Sea view".into(),
            price: "4500".into(),
            occupancy: "2".into(),
            image_url: "".into(),
        }
    }

    #[test]
    fn test_to_dto_trims_and_parses() {
        let dto = filled().to_dto().unwrap();
        assert_eq!(dto.name, "Deluxe");
        assert_eq!(dto.price, 4500.0);
        assert_eq!(dto.occupancy, 2);
        assert_eq!(dto.image_url, None);
    }

    #[test]
    fn test_to_dto_errors() {
        let mut form = filled();
        form.price = "abc".into();
        assert_eq!(form.to_dto(), Err("Price must be a number".to_string()));

        let mut form = filled();
        form.price = "-5".into();
        assert!(form.to_dto().is_err());

        let mut form = filled();
        form.name = String::new();
        assert_eq!(form.to_dto(), Err("Name is required".to_string()));
    }
}
