use super::const_error;

const_error!(INTERNAL, INTERNAL_SERVER_ERROR, "internal", "internal server error");
const_error!(DATABASE_ERROR, INTERNAL_SERVER_ERROR, "database", "database error");
const_error!(
    JSON_MISSING_FIELDS,
    UNPROCESSABLE_ENTITY,
    "json/missing-fields",
    "missing fields"
);
const_error!(JSON_SYNTAX_ERROR, BAD_REQUEST, "json/syntax-error", "syntax error");
const_error!(
    JSON_CONTENT_TYPE,
    BAD_REQUEST,
    "json/content-type",
    "missing or wrong content-type"
);
const_error!(JSON_VALIDATE_INVALID, BAD_REQUEST, "json/invalid", "invalid data");
const_error!(
    COULD_NOT_GET_CLAIMS,
    UNAUTHORIZED,
    "auth/missing-claims",
    "missing or invalid token"
);
const_error!(JWT_INVALID_TOKEN, UNAUTHORIZED, "auth/invalid-token", "invalid token");
const_error!(
    USER_ALREADY_EXISTS,
    BAD_REQUEST,
    "user/already-exists",
    "user already exists"
);
const_error!(
    INVALID_CREDENTIALS,
    UNAUTHORIZED,
    "user/invalid-credentials",
    "invalid username or password"
);
const_error!(EVENT_NOT_FOUND, NOT_FOUND, "event/not-found", "event not found");
const_error!(
    EVENT_LOCATION_INVALID,
    BAD_REQUEST,
    "event/location-invalid",
    "event location not found"
);
const_error!(
    MAX_ASSISTANCE_TOO_LARGE,
    BAD_REQUEST,
    "event/max-assistance",
    "max_assistance exceeds location max_capacity"
);
const_error!(
    EVENT_HAS_ENROLLMENTS,
    BAD_REQUEST,
    "event/has-enrollments",
    "enrolled users exist"
);
const_error!(
    EVENT_ALREADY_STARTED,
    BAD_REQUEST,
    "enrollment/event-started",
    "event already occurred or is today"
);
const_error!(
    ENROLLMENT_CLOSED,
    BAD_REQUEST,
    "enrollment/closed",
    "enrollment not open"
);
const_error!(
    ALREADY_ENROLLED,
    BAD_REQUEST,
    "enrollment/duplicate",
    "already enrolled"
);
const_error!(CAPACITY_FULL, BAD_REQUEST, "enrollment/capacity", "capacity full");
const_error!(NOT_ENROLLED, BAD_REQUEST, "enrollment/missing", "not enrolled");
const_error!(
    LOCATION_NOT_FOUND,
    NOT_FOUND,
    "location/not-found",
    "event location not found"
);
