pub mod communications;
