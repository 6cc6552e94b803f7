//! API endpoint modules.

mod domain_blocks;

pub use domain_blocks::{DomainBlocksApi, DOMAIN_BLOCKS_PATH, LIST_PAGE_LIMIT};
