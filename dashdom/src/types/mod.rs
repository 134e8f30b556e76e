mod tag;

pub use tag::Tag;
