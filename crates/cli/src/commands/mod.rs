pub(crate) mod corpus;
pub(crate) mod import;
pub(crate) mod serve;
