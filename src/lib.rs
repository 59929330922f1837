/*!
topodiff parses protocol-specific network topology snapshots into a
canonical weighted graph and computes structural deltas between two
snapshots.

Data can come from inline structured values, JSON text, local files, or
`http`/`https`/`telnet` URLs; every supported protocol decoder converges on
the same [TopologyGraph], which serializes deterministically to a NetJSON
NetworkGraph document.

```no_run
use topodiff::{diff, Protocol, TopologyParser};

let old = TopologyParser::new(Protocol::Olsr, "./topology-yesterday.json")
    .parse()
    .unwrap();
let new = TopologyParser::new(Protocol::Olsr, "http://127.0.0.1:9090/all")
    .parse()
    .unwrap();

let delta = diff(&old, &new);
if !delta.is_empty() {
    println!("{}", delta.to_json_pretty().unwrap());
}
```
*/

pub mod diff;
pub mod error;
pub(crate) mod io;
pub mod models;
pub mod parser;

pub use crate::diff::{diff, GraphDelta, TopologyDiff};
pub use crate::error::{FormatError, RetrievalError, TopologyError};
pub use crate::models::{GraphBuilder, Link, NetJsonGraph, NetJsonNode, TopologyGraph};
pub use crate::parser::netjson::DEFAULT_WEIGHT;
pub use crate::parser::{DataSource, Protocol, TopologyParser};
