use cqrs_bus::message::Message;
use cqrs_bus::{DispatchError, Query};

#[derive(Debug)]
enum ReportError {
    #[allow(dead_code)]
    Dispatch(DispatchError),
}

impl From<DispatchError> for ReportError {
    fn from(err: DispatchError) -> Self {
        Self::Dispatch(err)
    }
}

#[derive(Query)]
#[query(output = Vec<u64>, error = ReportError)]
#[handled_by("reports::ListReportsHandler")]
struct ListReports;

#[derive(Query)]
#[query(output = Option<T>)]
#[handled_by(FindHandler)]
struct Find<T> {
    #[allow(dead_code)]
    probe: T,
}

#[derive(Query)]
#[query(output = u32)]
enum Count {
    #[allow(dead_code)]
    All,
    #[allow(dead_code)]
    Active,
}

fn assert_query<Q: cqrs_bus::query::Query>() {}

fn main() {
    assert_query::<ListReports>();
    assert_query::<Find<String>>();
    assert_query::<Count>();

    assert_eq!(ListReports::HANDLED_BY, &["reports::ListReportsHandler"]);
    let _: <ListReports as Message>::Error = ReportError::from(DispatchError::InvalidHandler {
        handler: "h".into(),
        found: "f",
        required: "r",
    });
    let _: <Find<String> as Message>::Output = Some(String::new());
    assert_eq!(<Find<u8> as Message>::NAME, "Find");
    assert!(Count::HANDLED_BY.is_empty());
}
