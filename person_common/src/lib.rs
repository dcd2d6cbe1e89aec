use tracing_subscriber::EnvFilter;

pub mod person {
    tonic::include_proto!("person"); // The string specified here must match the proto package name

    /// Encoded descriptors for everything in `person.proto`, served by the reflection service.
    pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("person_descriptor");
}

pub const DEFAULT_PORT: u16 = 50051;

pub const PERSON_NAME: &str = "John Doe";
pub const PERSON_EMAIL: &str = "johndoe@example.com";

/// Installs the global `fmt` subscriber. `RUST_LOG` takes precedence over `default_directive`.
pub fn init_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod test {
    use super::person::{Person, PersonResponse};
    use prost::Message;

    #[test]
    fn missing_person_decodes_as_none() {
        let response = PersonResponse::decode(&[][..]).unwrap();
        assert_eq!(response.person, None);
    }

    #[test]
    fn person_fields_keep_their_tags() {
        let person = Person {
            name: "a".into(),
            id: 7,
            email: "b".into(),
        };

        // name = 1, id = 2, email = 3
        assert_eq!(person.encode_to_vec(), vec![0x0a, 1, b'a', 0x10, 7, 0x1a, 1, b'b']);
    }

    #[test]
    fn descriptor_set_is_embedded() {
        assert!(!super::person::FILE_DESCRIPTOR_SET.is_empty());
    }
}
