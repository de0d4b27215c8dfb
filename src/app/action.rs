/// Side effects the main loop performs on behalf of the handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Write the current rating defaults to the config file.
    SaveConfig,
    Quit,
}
