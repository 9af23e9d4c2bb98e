mod http_context;
mod http_context_builder;
mod http_error_mapper;

pub use http_context::HttpContext;
pub use http_context_builder::HttpContextBuilder;
pub use http_error_mapper::ReqwestErrorExt;
