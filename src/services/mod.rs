pub mod hotels;
pub mod images;
