pub mod charts;
pub mod correlation;
pub mod output;
pub mod pipeline;
pub mod stats;
pub mod turnover;
