use serde::{Deserialize, Serialize};

/// One of the four contact form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
    /// Hidden input; humans leave it empty, bots fill it in
    Honeypot,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Message, Field::Honeypot];

    /// Element id of the input on the contact page
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
            Field::Honeypot => "hp",
        }
    }
}

/// JSON body of a contact submission
///
/// Built fresh for every submit and dropped once the request resolves.
/// Values are trimmed but otherwise unchecked; the server owns validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    pub hp: String,
}

impl ContactPayload {
    /// Build a payload from raw field values, trimming each one
    pub fn from_fields(mut value: impl FnMut(Field) -> String) -> Self {
        let mut read = |field: Field| value(field).trim().to_string();
        Self {
            name: read(Field::Name),
            email: read(Field::Email),
            message: read(Field::Message),
            hp: read(Field::Honeypot),
        }
    }

    /// Serialize to the request body
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_trimmed() {
        let payload = ContactPayload::from_fields(|field| match field {
            Field::Name => "  Ali  ".to_string(),
            Field::Email => "\tali@example.com\n".to_string(),
            Field::Message => "  Salam, sualım var.  ".to_string(),
            Field::Honeypot => "   ".to_string(),
        });

        assert_eq!(payload.name, "Ali");
        assert_eq!(payload.email, "ali@example.com");
        assert_eq!(payload.message, "Salam, sualım var.");
        assert_eq!(payload.hp, "");
    }

    #[test]
    fn test_inner_whitespace_kept() {
        let payload = ContactPayload::from_fields(|field| match field {
            Field::Name => " Aysun  Rəsulova ".to_string(),
            _ => String::new(),
        });
        assert_eq!(payload.name, "Aysun  Rəsulova");
    }

    #[test]
    fn test_json_has_exactly_four_keys() {
        let payload = ContactPayload {
            name: "Ali".to_string(),
            email: "ali@example.com".to_string(),
            message: "hello there".to_string(),
            hp: String::new(),
        };
        let value: serde_json::Value =
            serde_json::from_slice(&payload.to_json_bytes().unwrap()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(object["name"], "Ali");
        assert_eq!(object["email"], "ali@example.com");
        assert_eq!(object["message"], "hello there");
        assert_eq!(object["hp"], "");
    }

    #[test]
    fn test_field_ids() {
        let ids: Vec<_> = Field::ALL.iter().map(|f| f.id()).collect();
        assert_eq!(ids, ["name", "email", "message", "hp"]);
    }
}
