mod support;

mod fetch_flow;
