pub mod targets {
    pub const NORMALIZE: &str = "normalize";
    pub const EXTRACT: &str = "extract";
    pub const COMPILE: &str = "compile";
    pub const EVALUATE: &str = "evaluate";
    pub const TABLE: &str = "table";
}
