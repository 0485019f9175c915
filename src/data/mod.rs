/// Feature matrix and label vector
pub mod dataset;
/// Table layout settings
pub mod params;
/// Integer table reader and writer
pub mod table;
