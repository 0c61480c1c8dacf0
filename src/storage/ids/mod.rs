#[macro_use]
mod macros;

define_uuid_id!(TodoId);

#[cfg(test)]
mod tests {
    use super::TodoId;

    #[test]
    fn parses_its_own_display_form() {
        let id = TodoId::new();
        let parsed: TodoId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);

        assert!("not-a-uuid".parse::<TodoId>().is_err());
    }

    #[test]
    fn serializes_as_uuid_string() {
        let id = TodoId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));

        let back: TodoId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
