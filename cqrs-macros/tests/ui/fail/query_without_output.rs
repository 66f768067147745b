use cqrs_bus::Query;

#[allow(dead_code)]
#[derive(Query)]
#[handled_by(ListHandler)]
struct List;

fn main() {}
