pub mod train_data;
