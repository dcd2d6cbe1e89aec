use person_common::person::person_service_server::PersonService;
use person_common::person::{Person, PersonRequest, PersonResponse};
use person_common::{PERSON_EMAIL, PERSON_NAME};
use tonic::{Request, Response, Status};
use tracing::debug;

#[derive(Debug, Default)]
pub struct PersonHandler {}

impl PersonHandler {
    pub fn new() -> Self {
        PersonHandler {}
    }

    /// Every id maps to the same placeholder record; only the id is taken from the caller.
    pub fn person(id: i32) -> Person {
        Person {
            name: PERSON_NAME.into(),
            id,
            email: PERSON_EMAIL.into(),
        }
    }
}

#[tonic::async_trait]
impl PersonService for PersonHandler {
    async fn get_person(
        &self,
        request: Request<PersonRequest>,
    ) -> Result<Response<PersonResponse>, Status> {
        let id = request.into_inner().id;
        debug!(id, "get_person");

        let response = PersonResponse {
            person: Some(Self::person(id)),
        };

        Ok(Response::new(response))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::prelude::*;

    async fn call(id: i32) -> Person {
        let handler = PersonHandler::new();
        let response = handler
            .get_person(Request::new(PersonRequest { id }))
            .await
            .unwrap();

        response.into_inner().person.unwrap()
    }

    #[tokio::test]
    async fn test_get_person_one() {
        let person = call(1).await;

        assert_eq!(
            person,
            Person {
                name: "John Doe".into(),
                id: 1,
                email: "johndoe@example.com".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_get_person_echoes_id() {
        let mut rng = thread_rng();

        for id in [0, -1, i32::MIN, i32::MAX] {
            assert_eq!(call(id).await.id, id);
        }

        for _ in 0..64 {
            let id: i32 = rng.gen();
            let person = call(id).await;

            assert_eq!(person.id, id);
            assert_eq!(person.name, PERSON_NAME);
            assert_eq!(person.email, PERSON_EMAIL);
        }
    }
}
