//! `UserService` gRPC controller.
//!
//! Accounts created over RPC always get the plain `user` role. The wire `User`
//! message has no password field, so hashes never leave the service.

use super::wire_id;
use crate::{
    core::UserUseCase,
    entities::user::{self, Role},
    models::{UpdateEmailRequest, UpdatePasswordRequest, UpdateProfileRequest, UserCreateRequest},
    proto::user::{
        CreateUserRequest, CreateUserResponse, GetUserResponse, GetUsersRequest,
        GetUsersResponse, Id, StatusResponse, UpdateEmailUserRequest, UpdatePasswordUserRequest,
        UpdateProfileUserRequest, User, user_service_server::UserService,
    },
};
use tonic::{Request, Response, Status};
use tracing::instrument;

/// Serves `user.UserService` on top of [`UserUseCase`]
#[derive(Debug, Clone)]
pub struct UserController {
    use_case: UserUseCase,
}

impl UserController {
    #[must_use]
    pub const fn new(use_case: UserUseCase) -> Self {
        Self { use_case }
    }
}

#[tonic::async_trait]
impl UserService for UserController {
    #[instrument(skip(self, request), fields(rpc = "CreateUser"))]
    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<CreateUserResponse>, Status> {
        let request = request.into_inner();
        let id = self
            .use_case
            .create(
                UserCreateRequest {
                    email: request.email,
                    name: request.name,
                    password: request.password,
                    phone_number: request.phone_number,
                },
                Role::User,
            )
            .await?;

        Ok(Response::new(CreateUserResponse {
            id: Some(Id { id: wire_id(id)? }),
        }))
    }

    #[instrument(skip(self, request), fields(rpc = "GetUser"))]
    async fn get_user(&self, request: Request<Id>) -> Result<Response<GetUserResponse>, Status> {
        let user = self
            .use_case
            .find_by_id(i64::from(request.into_inner().id))
            .await?;

        Ok(Response::new(GetUserResponse {
            user: Some(to_wire(user)?),
        }))
    }

    #[instrument(skip(self, request), fields(rpc = "UpdatePasswordUser"))]
    async fn update_password_user(
        &self,
        request: Request<UpdatePasswordUserRequest>,
    ) -> Result<Response<StatusResponse>, Status> {
        let request = request.into_inner();
        self.use_case
            .update_password(
                UpdatePasswordRequest {
                    password: request.password,
                },
                target_id(request.id),
            )
            .await?;

        Ok(status("Success update password"))
    }

    #[instrument(skip(self, request), fields(rpc = "UpdateEmailUser"))]
    async fn update_email_user(
        &self,
        request: Request<UpdateEmailUserRequest>,
    ) -> Result<Response<StatusResponse>, Status> {
        let request = request.into_inner();
        self.use_case
            .update_email(
                UpdateEmailRequest {
                    email: request.email,
                },
                target_id(request.id),
            )
            .await?;

        Ok(status("Success update email"))
    }

    #[instrument(skip(self, request), fields(rpc = "UpdateProfileUser"))]
    async fn update_profile_user(
        &self,
        request: Request<UpdateProfileUserRequest>,
    ) -> Result<Response<StatusResponse>, Status> {
        let request = request.into_inner();
        self.use_case
            .update_profile(
                UpdateProfileRequest {
                    name: request.name,
                    phone_number: request.phone_number,
                },
                target_id(request.id),
            )
            .await?;

        Ok(status("Success update profile"))
    }

    #[instrument(skip(self, request), fields(rpc = "Delete"))]
    async fn delete(&self, request: Request<Id>) -> Result<Response<StatusResponse>, Status> {
        self.use_case
            .delete(i64::from(request.into_inner().id))
            .await?;

        Ok(status("Success delete user"))
    }

    #[instrument(skip(self, request), fields(rpc = "GetUsers"))]
    async fn get_users(
        &self,
        request: Request<GetUsersRequest>,
    ) -> Result<Response<GetUsersResponse>, Status> {
        let request = request.into_inner();
        let (users, pagination) = self.use_case.find_all(request.limit, request.page).await?;

        let data = users
            .into_iter()
            .map(to_wire)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Response::new(GetUsersResponse {
            pagination: Some(pagination.into()),
            data,
        }))
    }
}

/// An absent `Id` message reads as id 0, which never matches a row.
fn target_id(id: Option<Id>) -> i64 {
    i64::from(id.unwrap_or_default().id)
}

fn status(message: &str) -> Response<StatusResponse> {
    Response::new(StatusResponse {
        message: message.to_string(),
    })
}

fn to_wire(user: user::Model) -> Result<User, Status> {
    Ok(User {
        id: Some(Id {
            id: wire_id(user.id)?,
        }),
        name: user.name,
        email: user.email,
        phone_number: user.phone_number,
    })
}
