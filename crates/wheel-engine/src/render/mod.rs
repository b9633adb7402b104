pub mod wedges;
