pub mod sondage_csv;
