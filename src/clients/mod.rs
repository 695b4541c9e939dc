pub mod wb;
