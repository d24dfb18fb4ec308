pub trait Configuration: Clone + Send + Sync + 'static {
    fn port(&self) -> u16;
    fn allowed_origins(&self) -> Vec<String>;

    fn is_origin_allowed(&self, origin: &str) -> bool {
        self.allowed_origins()
            .iter()
            .any(|allowed_origin| allowed_origin == origin)
    }
}
