pub mod fsutils;
