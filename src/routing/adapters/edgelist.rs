use crate::{
    edgelist::{EdgeList, LoadError},
    routing::adapters::{EdgeRecord, EdgeSource},
};

impl EdgeSource for EdgeList {
    type Error = LoadError;

    fn edges(&self) -> Result<impl Iterator<Item = &EdgeRecord>, Self::Error> {
        Ok(self.records.iter())
    }
}
