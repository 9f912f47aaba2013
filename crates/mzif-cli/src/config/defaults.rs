pub struct DefaultsConfig {
    pub progress_enabled: bool,
    pub list_models: bool,
    pub overwrite: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            progress_enabled: true,
            list_models: true,
            overwrite: true,
        }
    }
}
