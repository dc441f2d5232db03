//! Auth handlers — signup, login, and logout for each principal kind.
//!
//! Login failures are a uniform 401 "Invalid credentials" whether the
//! natural key is unknown or the password is wrong, so callers cannot
//! enumerate accounts.

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum_extra::extract::cookie::CookieJar;

use campushub_core::error::AppError;
use campushub_entity::principal::{NewFaculty, NewStudent, Principal, PrincipalRole};
use campushub_storage::key::{PROFILE_PREFIX, object_key};

use crate::dto::request::{
    AdminLoginRequest, FacultyLoginRequest, FacultySignupForm, StudentLoginRequest,
    StudentSignupForm,
};
use crate::dto::response::{AuthResponse, MessageResponse, PrincipalView};
use crate::dto::validate;
use crate::error::ApiError;
use crate::multipart::{self, MultipartForm};
use crate::session;
use crate::state::AppState;

/// Uniform message for all failed login attempts.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// POST /api/auth/student/signup
pub async fn student_signup(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Multipart,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>), ApiError> {
    let mut form = multipart::collect(form).await?;

    let signup = StudentSignupForm {
        roll_number: form.text("rollNumber").unwrap_or_default(),
        name: form.text("name").unwrap_or_default(),
        email: form.text("email").unwrap_or_default(),
        branch: form.text("branch"),
        password: form.text("password").unwrap_or_default(),
    };
    validate(&signup)?;

    // Fast-path duplicate check; the unique constraints catch the race.
    if state
        .student_repo
        .find_by_roll_number_or_email(&signup.roll_number, &signup.email)
        .await?
        .is_some()
    {
        return Err(AppError::duplicate("Student already exists").into());
    }

    let password_hash = state.password_hasher.hash_password(&signup.password)?;
    let profile_picture_url = store_profile_picture(&state, &mut form).await?;

    let student = state
        .student_repo
        .create(NewStudent {
            roll_number: signup.roll_number,
            name: signup.name,
            email: signup.email,
            branch: signup.branch,
            password_hash,
            profile_picture_url,
        })
        .await?;

    tracing::info!(roll_number = %student.roll_number, "Student registered");

    let (token, _) = state.token_encoder.issue(student.id, PrincipalRole::Student)?;
    let cookie = session::session_cookie(token, &state.config.auth);
    let view = PrincipalView::from(&Principal::Student(student));

    Ok((
        StatusCode::CREATED,
        jar.add(cookie),
        Json(AuthResponse::success(view)),
    ))
}

/// POST /api/auth/student/login
pub async fn student_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<StudentLoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), ApiError> {
    validate(&req)?;

    let student = state
        .student_repo
        .find_by_roll_number(&req.roll_number)
        .await?
        .ok_or_else(|| AppError::authentication(INVALID_CREDENTIALS))?;

    if !state
        .password_hasher
        .verify_password(&req.password, &student.password_hash)?
    {
        return Err(AppError::authentication(INVALID_CREDENTIALS).into());
    }

    let (token, _) = state.token_encoder.issue(student.id, PrincipalRole::Student)?;
    let cookie = session::session_cookie(token, &state.config.auth);
    let view = PrincipalView::from(&Principal::Student(student));

    Ok((jar.add(cookie), Json(AuthResponse::success(view))))
}

/// POST /api/auth/faculty/signup
pub async fn faculty_signup(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Multipart,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>), ApiError> {
    let mut form = multipart::collect(form).await?;

    let signup = FacultySignupForm {
        faculty_id: form.text("facultyId").unwrap_or_default(),
        name: form.text("name").unwrap_or_default(),
        email: form.text("email").unwrap_or_default(),
        branch: form.text("branch"),
        position: form.text("position"),
        password: form.text("password").unwrap_or_default(),
    };
    validate(&signup)?;

    if state
        .faculty_repo
        .find_by_faculty_id_or_email(&signup.faculty_id, &signup.email)
        .await?
        .is_some()
    {
        return Err(AppError::duplicate("Faculty already exists").into());
    }

    let password_hash = state.password_hasher.hash_password(&signup.password)?;
    let profile_picture_url = store_profile_picture(&state, &mut form).await?;

    let faculty = state
        .faculty_repo
        .create(NewFaculty {
            faculty_id: signup.faculty_id,
            name: signup.name,
            email: signup.email,
            branch: signup.branch,
            position: signup.position,
            password_hash,
            profile_picture_url,
        })
        .await?;

    tracing::info!(faculty_id = %faculty.faculty_id, "Faculty registered");

    let (token, _) = state.token_encoder.issue(faculty.id, PrincipalRole::Faculty)?;
    let cookie = session::session_cookie(token, &state.config.auth);
    let view = PrincipalView::from(&Principal::Faculty(faculty));

    Ok((
        StatusCode::CREATED,
        jar.add(cookie),
        Json(AuthResponse::success(view)),
    ))
}

/// POST /api/auth/faculty/login
pub async fn faculty_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<FacultyLoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), ApiError> {
    validate(&req)?;

    let faculty = state
        .faculty_repo
        .find_by_faculty_id(&req.faculty_id)
        .await?
        .ok_or_else(|| AppError::authentication(INVALID_CREDENTIALS))?;

    if !state
        .password_hasher
        .verify_password(&req.password, &faculty.password_hash)?
    {
        return Err(AppError::authentication(INVALID_CREDENTIALS).into());
    }

    let (token, _) = state.token_encoder.issue(faculty.id, PrincipalRole::Faculty)?;
    let cookie = session::session_cookie(token, &state.config.auth);
    let view = PrincipalView::from(&Principal::Faculty(faculty));

    Ok((jar.add(cookie), Json(AuthResponse::success(view))))
}

/// POST /api/auth/admin/login
///
/// Fixed-credential path; no credential store record is involved.
pub async fn admin_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<AdminLoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), ApiError> {
    validate(&req)?;

    if !state.admin_credentials.verify(&req.email, &req.password) {
        return Err(AppError::authentication(INVALID_CREDENTIALS).into());
    }

    let admin = state.admin_credentials.principal();
    let (token, _) = state.token_encoder.issue(admin.id, PrincipalRole::Admin)?;
    let cookie = session::session_cookie(token, &state.config.auth);
    let view = PrincipalView::from(&Principal::Admin(admin));

    Ok((jar.add(cookie), Json(AuthResponse::success(view))))
}

/// GET /api/auth/logout
///
/// The session is stateless; logging out only clears the cookie.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let cookie = session::expired_session_cookie(&state.config.auth);
    (
        jar.add(cookie),
        Json(MessageResponse::new("Logged out successfully")),
    )
}

/// Store an optional profile picture from the signup form.
async fn store_profile_picture(
    state: &AppState,
    form: &mut MultipartForm,
) -> Result<Option<String>, AppError> {
    let Some(file) = form.take_file("profilePicture") else {
        return Ok(None);
    };

    let key = object_key(PROFILE_PREFIX, &file.filename);
    let url = state
        .blob_store
        .put(&key, file.data, file.content_type.as_deref())
        .await?;
    Ok(Some(url))
}
