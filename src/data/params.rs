use crate::error::TreeError;

/// How integer tables are laid out on disk.
#[derive(Clone, Debug)]
pub struct TableParams {
    pub has_headers: bool,
    pub delimiter: u8,
}

impl Default for TableParams {
    fn default() -> Self {
        Self::new()
    }
}

impl TableParams {
    pub fn new() -> Self {
        Self {
            has_headers: false,
            delimiter: b',',
        }
    }

    pub fn set_has_headers(&mut self, has_headers: bool) {
        self.has_headers = has_headers;
    }

    pub fn set_delimiter(&mut self, delimiter: char) -> Result<(), TreeError> {
        // Digits and '-' would be read as part of an integer field.
        if !delimiter.is_ascii()
            || delimiter.is_ascii_digit()
            || matches!(delimiter, '"' | '\n' | '\r' | '-')
        {
            return Err(TreeError::InvalidParameter(
                "delimiter".to_string(),
                "a single ASCII character other than a quote, newline, digit or '-'".to_string(),
                format!("{:?}", delimiter),
            ));
        }
        self.delimiter = delimiter as u8;
        Ok(())
    }

    pub fn has_headers(&self) -> bool {
        self.has_headers
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }
}

/// Settings for the hold-out evaluation run.
#[derive(Clone, Debug)]
pub struct EvaluateParams {
    pub train_size: f64,
    pub seed: Option<u64>,
}

impl Default for EvaluateParams {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluateParams {
    pub fn new() -> Self {
        Self {
            train_size: 0.75,
            seed: None,
        }
    }

    pub fn set_train_size(&mut self, train_size: f64) -> Result<(), TreeError> {
        if !(train_size > 0.0 && train_size < 1.0) {
            return Err(TreeError::InvalidParameter(
                "train_size".to_string(),
                "a value strictly between 0.0 and 1.0".to_string(),
                train_size.to_string(),
            ));
        }
        self.train_size = train_size;
        Ok(())
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    pub fn train_size(&self) -> f64 {
        self.train_size
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
