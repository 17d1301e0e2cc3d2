pub mod page;

pub use page::{ImportFromFilePage, PAGE_TITLE};
