//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod crumbs;
pub(crate) mod page;
mod site;

pub(crate) use check::CheckArgs;
pub(crate) use crumbs::CrumbsArgs;
pub(crate) use page::PageArgs;
