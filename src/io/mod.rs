pub mod pbm;
pub mod report;

pub use pbm::{encode_pbm, write_pbm};
pub use report::RunReport;
