use crate::domain::model::CatalogItem;

/// Fixed, ordered list of bands. The first entry is always the "no selection" sentinel.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn standard() -> Self {
        Self {
            items: vec![
                CatalogItem::new(CatalogItem::SENTINEL_NAME, "mipmap/concert", 0.0),
                CatalogItem::new("Written by Wolves", "mipmap/written_by_wolves", 24.95),
                CatalogItem::new("Linkin Park", "mipmap/linkin_park", 63.95),
                CatalogItem::new("Man with a Mission", "mipmap/man_with_a_mission", 36.00),
                CatalogItem::new("Hollywood Undead", "mipmap/hollywood_undead", 125.0),
                CatalogItem::new("Electric Call Boy", "mipmap/ecb", 125.0),
                CatalogItem::new("Self Deception", "mipmap/self_deception", 125.0),
            ],
        }
    }

    pub fn list_catalog_items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn sentinel(&self) -> &CatalogItem {
        &self.items[0]
    }

    /// Purchasable entries, i.e. everything except the sentinel.
    pub fn bands(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter().filter(|item| !item.is_sentinel())
    }

    pub fn get(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }

    /// Case-insensitive lookup, ignoring surrounding whitespace.
    pub fn find_by_name(&self, name: &str) -> Option<&CatalogItem> {
        let wanted = name.trim();
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(wanted))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
