use crate::core::domain::Identifiable;

pub mod model;

pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn is_available(&self) -> bool;
    // multi-line detail view, one `Field: value` per line
    fn describe(&self) -> String;
}
