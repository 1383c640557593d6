pub mod logger;
pub mod shade_pipeline;
