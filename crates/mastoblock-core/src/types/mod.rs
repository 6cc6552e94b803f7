mod de;
mod domain_block;
mod feed;
mod report;
mod severity;

pub use domain_block::*;
pub use feed::*;
pub use report::*;
pub use severity::*;
