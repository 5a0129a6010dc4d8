use std::collections::BTreeSet;

use super::record::ColumnDef;

/// Набор скрытых колонок. Живёт только в памяти страницы.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnVisibility {
    hidden: BTreeSet<&'static str>,
}

impl ColumnVisibility {
    pub fn from_schema<R>(schema: &[ColumnDef<R>]) -> Self {
        Self {
            hidden: schema
                .iter()
                .filter(|c| c.hidden_by_default)
                .map(|c| c.key)
                .collect(),
        }
    }

    pub fn is_visible(&self, key: &str) -> bool {
        !self.hidden.contains(key)
    }

    pub fn toggle(&mut self, key: &'static str) {
        if !self.hidden.remove(key) {
            self.hidden.insert(key);
        }
    }

    pub fn visible_columns<R>(&self, schema: &[ColumnDef<R>]) -> Vec<ColumnDef<R>> {
        schema
            .iter()
            .filter(|c| self.is_visible(c.key))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::record::ListRecord;
    use crate::shared::list_view::test_support::Item;

    #[test]
    fn test_toggle_visibility() {
        let schema = Item::columns();
        let mut columns = ColumnVisibility::from_schema(&schema);
        let keys = |v: &ColumnVisibility| {
            v.visible_columns(&schema)
                .iter()
                .map(|c| c.key)
                .collect::<Vec<_>>()
        };
        assert_eq!(keys(&columns), vec!["name", "price", "active"]);

        columns.toggle("createdAt");
        columns.toggle("price");
        assert_eq!(keys(&columns), vec!["name", "active", "createdAt"]);
        assert!(!columns.is_visible("price"));
    }
}
