pub mod health;
pub mod train_data;
