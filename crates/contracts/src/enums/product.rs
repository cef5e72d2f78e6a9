/// Продукты, интерес к которым отслеживается на странице услуг
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Product {
    Launchpad,
    Dcf,
    FlowStudio,
    ConnectCrm,
    ChatBoost,
}

impl Product {
    /// Ключ продукта для аналитики
    pub fn key(&self) -> &'static str {
        match self {
            Product::Launchpad => "launchpad",
            Product::Dcf => "dcf",
            Product::FlowStudio => "flowstudio",
            Product::ConnectCrm => "connectcrm",
            Product::ChatBoost => "chatboost",
        }
    }

    /// Метка CTA-кнопки (`data-cta`), которая означает интерес к продукту
    pub fn interest_label(&self) -> &'static str {
        match self {
            Product::Launchpad => "launchpad_interest",
            Product::Dcf => "dcf_interest",
            Product::FlowStudio => "flowstudio_interest",
            Product::ConnectCrm => "connectcrm_interest",
            Product::ChatBoost => "chatboost_interest",
        }
    }

    /// Все продукты
    pub fn all() -> [Product; 5] {
        [
            Product::Launchpad,
            Product::Dcf,
            Product::FlowStudio,
            Product::ConnectCrm,
            Product::ChatBoost,
        ]
    }

    /// Поиск продукта по метке CTA
    pub fn from_interest_label(label: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|p| p.interest_label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interest_label_lookup() {
        assert_eq!(
            Product::from_interest_label("flowstudio_interest"),
            Some(Product::FlowStudio)
        );
        assert_eq!(Product::from_interest_label("book_call"), None);
        assert_eq!(Product::from_interest_label("flowstudio"), None);
    }

    #[test]
    fn test_every_label_maps_back() {
        for product in Product::all() {
            assert_eq!(
                Product::from_interest_label(product.interest_label()),
                Some(product)
            );
        }
    }
}
