use crate::shared::api::RestApi;
use contracts::domain::a001_room_category::aggregate::RoomCategory;
use contracts::domain::a002_product::aggregate::{Product, ProductDto};
use contracts::shared::list_view::RecordApi;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    /// Id категории; пустая строка = без категории
    pub category: String,
    pub image_url: String,
    pub is_active: bool,
    pub new_arrival: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            stock: "0".to_string(),
            category: String::new(),
            image_url: String::new(),
            is_active: true,
            new_arrival: false,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl ProductForm {
    pub fn from_record(product: &Product) -> Self {
        let dto = product.to_dto();
        Self {
            name: dto.name,
            description: dto.description,
            price: dto.price.to_string(),
            stock: dto.stock.to_string(),
            category: dto.category.unwrap_or_default(),
            image_url: dto.image_url.unwrap_or_default(),
            is_active: dto.is_active,
            new_arrival: dto.new_arrival,
        }
    }

    pub fn to_dto(&self) -> Result<ProductDto, String> {
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .map_err(|_| "Price must be a number".to_string())?;
        let stock = match self.stock.trim() {
            "" => 0,
            s => s
                .parse::<i64>()
                .map_err(|_| "Stock must be a whole number".to_string())?,
        };
        let dto = ProductDto {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            stock,
            category: non_empty(&self.category),
            image_url: non_empty(&self.image_url),
            is_active: self.is_active,
            new_arrival: self.new_arrival,
        };
        dto.validate()?;
        Ok(dto)
    }
}

pub async fn fetch_by_id(api: RestApi<Product>, id: &str) -> Result<Product, String> {
    api.get_by_id(id).await.map_err(|e| e.to_string())
}

/// Категории для select; ошибка не блокирует форму
pub async fn fetch_categories(api: RestApi<RoomCategory>) -> Result<Vec<RoomCategory>, String> {
    api.list().await.map_err(|e| e.to_string())
}

pub async fn save_form(
    api: RestApi<Product>,
    id: Option<&str>,
    dto: &ProductDto,
) -> Result<Product, String> {
    let result = match id {
        Some(id) => api.update(id, dto).await,
        None => api.create(dto).await,
    };
    result.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_defaults() {
        let form = ProductForm {
            name: "Towel".into(),
            price: "250".into(),
            ..Default::default()
        };
        let dto = form.to_dto().unwrap();
        assert!(dto.is_active);
        assert!(!dto.new_arrival);
        assert_eq!(dto.stock, 0);
        assert_eq!(dto.category, None);
    }

    #[test]
    fn test_invalid_numbers() {
        let form = ProductForm {
            name: "Towel".into(),
            price: "".into(),
            ..Default::default()
        };
        assert_eq!(form.to_dto(), Err("Price must be a number".to_string()));

        let form = ProductForm {
            name: "Towel".into(),
            price: "10".into(),
            stock: "-1".into(),
            ..Default::default()
        };
        assert_eq!(form.to_dto(), Err("Stock cannot be negative".to_string()));
    }
}
