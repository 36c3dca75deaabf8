pub mod scholarship;

pub use scholarship::Entity as Scholarship;
