//! Specifies logic to read and write a road graph in json format.

#[cfg(test)]
#[path = "../tests/unit/graph_test.rs"]
mod graph_test;

use courier_core::models::{Edge, Graph, Location};
use courier_core::utils::{Float, GenericError, GenericResult};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::io::{BufReader, BufWriter, Read, Write};

/// A location coordinate. Any other fields of the location object are ignored.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct LocationData {
    /// An optional numeric id, informational only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<usize>,
    /// X coordinate.
    pub x: Float,
    /// Y coordinate.
    pub y: Float,
}

/// Locations keyed by their names. Keeps the order of the json object.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Locations(pub Vec<(String, LocationData)>);

/// A road between two locations with all its weights.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct EdgeData {
    /// One end of the road.
    pub from: String,
    /// Another end of the road.
    pub to: String,
    /// A road length.
    pub distance: Float,
    /// A travel time.
    pub time: Float,
    /// A fuel cost.
    pub fuel_cost: Float,
}

/// Informational data about the graph.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct GraphMetadata {
    /// Amount of locations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_locations: Option<usize>,
    /// Amount of roads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_roads: Option<usize>,
    /// A city name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// A road graph definition.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct GraphData {
    /// Graph locations.
    pub locations: Locations,
    /// Graph roads.
    pub edges: Vec<EdgeData>,
    /// Optional graph metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<GraphMetadata>,
}

impl Serialize for Locations {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, location) in self.0.iter() {
            map.serialize_entry(name, location)?;
        }

        map.end()
    }
}

impl<'de> Deserialize<'de> for Locations {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(LocationsVisitor)
    }
}

struct LocationsVisitor;

impl<'de> Visitor<'de> for LocationsVisitor {
    type Value = Locations;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object with locations keyed by their names")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut locations = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_entry::<String, LocationData>()? {
            locations.push(entry);
        }

        Ok(Locations(locations))
    }
}

impl GraphData {
    /// Converts the definition into a graph. Fails if location names are not unique.
    pub fn into_graph(self) -> GenericResult<Graph> {
        let locations = self
            .locations
            .0
            .into_iter()
            .map(|(name, location)| Location { name, x: location.x, y: location.y })
            .collect();
        let edges = self
            .edges
            .into_iter()
            .map(|edge| Edge {
                from: edge.from,
                to: edge.to,
                distance: edge.distance,
                time: edge.time,
                fuel_cost: edge.fuel_cost,
            })
            .collect();

        Graph::new(locations, edges)
    }
}

impl From<&Graph> for GraphData {
    fn from(graph: &Graph) -> Self {
        let locations = graph
            .locations()
            .iter()
            .enumerate()
            .map(|(id, location)| (location.name.clone(), LocationData { id: Some(id), x: location.x, y: location.y }))
            .collect();
        let edges = graph
            .edges()
            .iter()
            .map(|edge| EdgeData {
                from: edge.from.clone(),
                to: edge.to.clone(),
                distance: edge.distance,
                time: edge.time,
                fuel_cost: edge.fuel_cost,
            })
            .collect::<Vec<_>>();

        let metadata = GraphMetadata { num_locations: Some(graph.size()), num_roads: Some(edges.len()), city: None };

        Self { locations: Locations(locations), edges, metadata: Some(metadata) }
    }
}

/// Reads a road graph from various sources.
pub trait GraphReader {
    /// Reads a graph defined in json format.
    fn read_graph(self) -> GenericResult<Graph>;
}

impl<R: Read> GraphReader for BufReader<R> {
    fn read_graph(self) -> GenericResult<Graph> {
        deserialize_graph(self)?.into_graph()
    }
}

impl GraphReader for String {
    fn read_graph(self) -> GenericResult<Graph> {
        BufReader::new(self.as_bytes()).read_graph()
    }
}

/// Deserializes a road graph definition in json format from `BufReader`.
pub fn deserialize_graph<R: Read>(reader: BufReader<R>) -> GenericResult<GraphData> {
    serde_json::from_reader(reader)
        .map_err(|err| GenericError::Data(format!("cannot deserialize graph, check input json: '{err}'")))
}

/// Serializes a road graph definition in json format into `BufWriter`.
pub fn serialize_graph<W: Write>(graph: &GraphData, mut writer: BufWriter<W>) -> GenericResult<()> {
    serde_json::to_writer_pretty(&mut writer, graph)
        .map_err(|err| GenericError::Data(format!("cannot serialize graph: '{err}'")))?;

    writer.flush().map_err(GenericError::from)
}

/// Writes the graph in json format into `BufWriter`.
pub fn write_graph<W: Write>(graph: &Graph, writer: BufWriter<W>) -> GenericResult<()> {
    serialize_graph(&GraphData::from(graph), writer)
}
