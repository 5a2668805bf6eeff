//! Built-in styles

use std::sync::Arc;

use crate::entity::{EntityClass, EntityField, EntityTable};
use crate::utils::naming::{camel_to_lower_underscore, camel_to_upper_underscore, identity, to_lower, to_upper};

use super::{Style, LOWER, LOWER_UNDERSCORE, NORMAL, UPPER, UPPER_UNDERSCORE};

/// The styles shipped with entity_naming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinStyle {
    Normal,
    LowerUnderscore,
    Lower,
    Upper,
    UpperUnderscore,
}

impl BuiltinStyle {
    /// All built-in styles, in discovery order
    pub const ALL: [BuiltinStyle; 5] = [
        BuiltinStyle::Normal,
        BuiltinStyle::LowerUnderscore,
        BuiltinStyle::Lower,
        BuiltinStyle::Upper,
        BuiltinStyle::UpperUnderscore,
    ];

    /// Get the built-in style with the given name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Get the registered name of this style
    pub fn name(self) -> &'static str {
        match self {
            BuiltinStyle::Normal => NORMAL,
            BuiltinStyle::LowerUnderscore => LOWER_UNDERSCORE,
            BuiltinStyle::Lower => LOWER,
            BuiltinStyle::Upper => UPPER,
            BuiltinStyle::UpperUnderscore => UPPER_UNDERSCORE,
        }
    }

    /// Apply this style to a single name
    pub fn convert(self, name: &str) -> String {
        match self {
            BuiltinStyle::Normal => identity(name),
            BuiltinStyle::LowerUnderscore => camel_to_lower_underscore(name),
            BuiltinStyle::Lower => to_lower(name),
            BuiltinStyle::Upper => to_upper(name),
            BuiltinStyle::UpperUnderscore => camel_to_upper_underscore(name),
        }
    }

    /// Get every built-in style as a shareable trait object
    pub fn instances() -> Vec<Arc<dyn Style>> {
        Self::ALL
            .into_iter()
            .map(|s| Arc::new(s) as Arc<dyn Style>)
            .collect()
    }
}

impl Style for BuiltinStyle {
    fn style(&self) -> &str {
        self.name()
    }

    fn table_name(&self, entity: &EntityClass) -> String {
        self.convert(entity.simple_name())
    }

    fn column_name(&self, _table: &EntityTable, field: &EntityField) -> String {
        self.convert(field.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(BuiltinStyle::Normal, "UserOrder", "orderId")]
    #[case(BuiltinStyle::LowerUnderscore, "user_order", "order_id")]
    #[case(BuiltinStyle::Lower, "userorder", "orderid")]
    #[case(BuiltinStyle::Upper, "USERORDER", "ORDERID")]
    #[case(BuiltinStyle::UpperUnderscore, "USER_ORDER", "ORDER_ID")]
    fn test_builtin_names(#[case] style: BuiltinStyle, #[case] table: &str, #[case] column: &str) {
        let class = EntityClass::new("UserOrder").field("orderId");
        let entity_table = EntityTable::new(table, &class);

        assert_eq!(style.table_name(&class), table);
        assert_eq!(style.column_name(&entity_table, &class.fields[0]), column);
    }

    #[test]
    fn test_from_name() {
        for style in BuiltinStyle::ALL {
            assert_eq!(BuiltinStyle::from_name(style.name()), Some(style));
            assert_eq!(style.style(), style.name());
        }
        assert_eq!(BuiltinStyle::from_name("camel"), None);
    }

    #[test]
    fn test_instances_are_unique() {
        let names: Vec<String> = BuiltinStyle::instances()
            .iter()
            .map(|s| s.style().to_string())
            .collect();

        assert_eq!(names, vec!["normal", "lower_underscore", "lower", "upper", "upper_underscore"]);
    }
}
