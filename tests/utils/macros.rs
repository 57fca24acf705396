macro_rules! assert_error {
    ($res:expr, $error:expr) => {{
        let res = $res;

        assert_eq!(res.status(), $error.status());

        let body: serde_json::Value = res.json().await;
        assert_eq!(body["code"], $error.code());
    }};
}

pub(crate) use assert_error;
