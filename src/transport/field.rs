//! `FieldService` gRPC controller.

use super::wire_id;
use crate::{
    core::FieldUseCase,
    entities::field,
    models::FieldRequest,
    proto::field::{
        CreateFieldRequest, CreateFieldResponse, Field, GetFieldResponse, GetFieldsRequest,
        GetFieldsResponse, Id, StatusResponse, UpdateFieldRequest,
        field_service_server::FieldService,
    },
};
use tonic::{Request, Response, Status};
use tracing::instrument;

/// Serves `field.FieldService` on top of [`FieldUseCase`]
#[derive(Debug, Clone)]
pub struct FieldController {
    use_case: FieldUseCase,
}

impl FieldController {
    #[must_use]
    pub const fn new(use_case: FieldUseCase) -> Self {
        Self { use_case }
    }
}

#[tonic::async_trait]
impl FieldService for FieldController {
    #[instrument(skip(self, request), fields(rpc = "GetFields"))]
    async fn get_fields(
        &self,
        request: Request<GetFieldsRequest>,
    ) -> Result<Response<GetFieldsResponse>, Status> {
        let request = request.into_inner();
        let (fields, pagination) = self.use_case.find_all(request.limit, request.page).await?;

        let data = fields
            .into_iter()
            .map(to_wire)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Response::new(GetFieldsResponse {
            pagination: Some(pagination.into()),
            data,
        }))
    }

    #[instrument(skip(self, request), fields(rpc = "GetField"))]
    async fn get_field(&self, request: Request<Id>) -> Result<Response<GetFieldResponse>, Status> {
        let field = self
            .use_case
            .find_by_id(i64::from(request.into_inner().id))
            .await?;

        Ok(Response::new(GetFieldResponse {
            field: Some(to_wire(field)?),
        }))
    }

    #[instrument(skip(self, request), fields(rpc = "CreateField"))]
    async fn create_field(
        &self,
        request: Request<CreateFieldRequest>,
    ) -> Result<Response<CreateFieldResponse>, Status> {
        let request = request.into_inner();
        let field = self
            .use_case
            .save(FieldRequest {
                name: request.name,
                field_type: request.r#type,
                description: request.description,
                price: narrow_price(request.price)?,
            })
            .await?;

        Ok(Response::new(CreateFieldResponse {
            id: wire_id(field.id)?,
            message: "Create field succesfully".to_string(),
        }))
    }

    #[instrument(skip(self, request), fields(rpc = "UpdateField"))]
    async fn update_field(
        &self,
        request: Request<UpdateFieldRequest>,
    ) -> Result<Response<StatusResponse>, Status> {
        let request = request.into_inner();
        self.use_case
            .update(
                FieldRequest {
                    name: request.name,
                    field_type: request.r#type,
                    description: request.description,
                    price: narrow_price(request.price)?,
                },
                i64::from(request.id),
            )
            .await?;

        Ok(Response::new(StatusResponse {
            message: "Success update".to_string(),
        }))
    }

    #[instrument(skip(self, request), fields(rpc = "DeleteField"))]
    async fn delete_field(&self, request: Request<Id>) -> Result<Response<StatusResponse>, Status> {
        self.use_case
            .delete(i64::from(request.into_inner().id))
            .await?;

        Ok(Response::new(StatusResponse {
            message: "Succes delete".to_string(),
        }))
    }
}

fn to_wire(field: field::Model) -> Result<Field, Status> {
    Ok(Field {
        id: wire_id(field.id)?,
        name: field.name,
        r#type: field.field_type,
        description: field.description,
        price: u64::from(field.price),
    })
}

fn narrow_price(price: u64) -> Result<u32, Status> {
    u32::try_from(price)
        .map_err(|_| Status::invalid_argument(format!("price {price} exceeds {}", u32::MAX)))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{repository::FieldRepository, test_utils::*};
    use sea_orm::DatabaseConnection;
    use tonic::Code;

    fn controller(db: DatabaseConnection) -> FieldController {
        FieldController::new(FieldUseCase::new(FieldRepository::new(), db))
    }

    fn create_request(name: &str) -> CreateFieldRequest {
        CreateFieldRequest {
            name: name.to_string(),
            r#type: "futsal".to_string(),
            description: "Indoor court".to_string(),
            price: 150_000,
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let db = setup_test_db().await.unwrap();
        let controller = controller(db);

        let created = controller
            .create_field(Request::new(create_request("Court A")))
            .await
            .unwrap()
            .into_inner();
        assert!(created.id > 0);
        assert_eq!(created.message, "Create field succesfully");

        let fetched = controller
            .get_field(Request::new(Id { id: created.id }))
            .await
            .unwrap()
            .into_inner()
            .field
            .unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "Court A");
        assert_eq!(fetched.r#type, "futsal");
        assert_eq!(fetched.description, "Indoor court");
        assert_eq!(fetched.price, 150_000);
    }

    #[tokio::test]
    async fn test_get_fields_embeds_pagination() {
        let db = setup_test_db().await.unwrap();
        for i in 0..25 {
            create_test_field(&db, &format!("Court {i:02}")).await.unwrap();
        }
        let controller = controller(db);

        let response = controller
            .get_fields(Request::new(GetFieldsRequest { limit: 10, page: 3 }))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(response.data.len(), 5);
        let pagination = response.pagination.unwrap();
        assert_eq!(pagination.current_page, 3);
        assert_eq!(pagination.limit, 10);
        assert_eq!(pagination.total_record, 25);
        assert_eq!(pagination.total_page, 2);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let (db, field) = setup_with_field().await.unwrap();
        let controller = controller(db);
        let id = u32::try_from(field.id).unwrap();

        let response = controller
            .update_field(Request::new(UpdateFieldRequest {
                id,
                name: "Court Z".to_string(),
                r#type: "tennis".to_string(),
                description: "Clay".to_string(),
                price: 200_000,
            }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.message, "Success update");

        let response = controller
            .delete_field(Request::new(Id { id }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.message, "Succes delete");

        let status = controller
            .get_field(Request::new(Id { id }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::NotFound);
    }

    #[tokio::test]
    async fn test_errors_map_to_distinct_codes() {
        let db = setup_test_db().await.unwrap();
        let controller = controller(db);

        let status = controller
            .create_field(Request::new(CreateFieldRequest {
                r#type: "x".to_string(),
                ..create_request("Court A")
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);

        let status = controller
            .create_field(Request::new(CreateFieldRequest {
                price: u64::from(u32::MAX) + 1,
                ..create_request("Court A")
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);

        let status = controller
            .delete_field(Request::new(Id { id: 77 }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::NotFound);
    }
}
