// src/models/modal.rs

use serde::Serialize;

// Estado aberto/fechado de um modal (ex.: "criar loja", "confirmar exclusão").
// Pertence a quem chama; não existe instância global.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalState {
    is_open: bool,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!ModalState::new().is_open());
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let mut modal = ModalState::new();

        modal.open();
        modal.open();
        assert!(modal.is_open());

        modal.close();
        assert!(!modal.is_open());
        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn separate_values_do_not_share_state() {
        let mut store_modal = ModalState::new();
        let alert_modal = ModalState::new();

        store_modal.open();
        assert!(store_modal.is_open());
        assert!(!alert_modal.is_open());
    }

    #[test]
    fn serializes_as_camel_case() {
        let mut modal = ModalState::new();
        modal.open();
        assert_eq!(serde_json::to_string(&modal).unwrap(), r#"{"isOpen":true}"#);
    }
}
