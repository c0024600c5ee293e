use anyhow::anyhow;
use innovation_core::AppError;
use innovation_db::UserRepository;
use innovation_models::{
    CreateUserDto, CreateUserResponse, DeleteResult, InsertResult, MessageResponse, NewUser,
    RoleCheckResponse, UpdateRoleDto, User, UserFilterParams, UserRole,
};
use innovation_observability::{track_role_updated, track_user_created};
use tracing::info;
use uuid::Uuid;

pub struct UserService;

impl UserService {
    pub async fn list_users(
        users: &dyn UserRepository,
        filter: UserFilterParams,
    ) -> Result<Vec<User>, AppError> {
        users
            .list_users(&filter.normalized())
            .await
            .map_err(AppError::database)
    }

    /// Whether `email` holds `role`. Only answers about the caller's own
    /// email; asking about anyone else is `false` without a lookup.
    pub async fn check_role(
        users: &dyn UserRepository,
        caller_email: Option<&str>,
        role: &str,
        email: &str,
    ) -> Result<RoleCheckResponse, AppError> {
        if caller_email != Some(email) {
            return Ok(RoleCheckResponse::new(role, false));
        }

        let user = users
            .find_by_email(email)
            .await
            .map_err(AppError::database)?;

        let holds = user.is_some_and(|u| u.has_role(role));
        Ok(RoleCheckResponse::new(role, holds))
    }

    pub async fn update_role(
        users: &dyn UserRepository,
        email: &str,
        dto: UpdateRoleDto,
    ) -> Result<MessageResponse, AppError> {
        let role = UserRole::from(dto.role);
        let matched = users
            .update_role(email, &role)
            .await
            .map_err(AppError::database)?;

        info!(email = %email, role = %role, matched, "User role updated");
        track_role_updated(role.as_str());

        Ok(MessageResponse::new("User role updated successfully"))
    }

    /// Registers a user unless the email is already taken.
    pub async fn create_user(
        users: &dyn UserRepository,
        dto: CreateUserDto,
    ) -> Result<CreateUserResponse, AppError> {
        match users
            .create_user(NewUser::from(dto))
            .await
            .map_err(AppError::database)?
        {
            Some(user) => {
                track_user_created();
                Ok(CreateUserResponse::Created(InsertResult::new(user.id)))
            }
            None => Ok(CreateUserResponse::already_exists()),
        }
    }

    pub async fn delete_user(users: &dyn UserRepository, id: &str) -> Result<DeleteResult, AppError> {
        let id = Uuid::parse_str(id)
            .map_err(|_| AppError::bad_request(anyhow!("Invalid user id '{}'", id)))?;

        let deleted = users.delete_user(id).await.map_err(AppError::database)?;
        Ok(DeleteResult::new(deleted))
    }
}
