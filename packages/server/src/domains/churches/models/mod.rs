pub mod church;
