//! 画面に表示する文言

pub const NOT_AN_IMAGE: &str = "Please upload an image file";
pub const EXTRACTION_FAILED: &str = "Error extracting text from image";
pub const MISSING_API_KEY: &str = "API key is not set. Please check your environment variables.";
pub const CONFIG_ERROR: &str = "The configuration could not be read.";
pub const PROCESSING_FAILED: &str = "An error occurred while processing the ingredients";
pub const NO_INGREDIENTS: &str = "No ingredients data available.";

pub const DROP_HINT: &str = "Drag and drop an image here, or click to select a file";
pub const SELECT_IMAGE: &str = "Select Image";
pub const EXTRACTED_TEXT_HEADING: &str = "Extracted Text:";
pub const ANALYZE_BUTTON: &str = "Analyze Ingredients";
pub const PROCESSING_BUTTON: &str = "Processing...";
pub const BACK_TO_HOME: &str = "Back to Home";
pub const HOME_TITLE: &str = "Analyze Product Ingredients";
pub const RESULTS_TITLE: &str = "Ingredient Analysis";
