use strum_macros::{Display, EnumIter, EnumString};

/// Entities a data-access route can be scoped to.
///
/// Routes bind one of these statically so that translated database errors
/// can name the record the client was working with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum EntityName {
    Category,
    Product,
    User,
    Attribute,
    AttributeValue,
    Image,
    Order,
    Tag,
}
