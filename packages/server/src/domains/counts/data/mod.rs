mod count;

pub use count::CountSummaryData;
