use rxmq_wire::ObjectDescriptor;

use super::Marshal;
use crate::codec::{StemReader, StemWriter};
use crate::error::MarshalError;
use crate::store::{VariableStore, is_stem};

impl Marshal for ObjectDescriptor {
    const TAGS: &'static [&'static str] = &[
        "VER", "OT", "ON", "OQM", "DQN", "AUID", // v1
        "RP", "KDC", "UDC", "IDC", // v2
        "ASID", "RQN", "RQMN", // v3
        "OS.0", "OS.CCSID", "OS.1", "SS.0", "SS.CCSID", "SS.1", "ROS.0", "ROS.CCSID", "ROS.1",
        "RT", // v4
    ];

    /// A `path` that is not a stem is taken as the object name itself.
    fn to_record<S: VariableStore + ?Sized>(store: &S, path: &str) -> Result<Self, MarshalError> {
        if !is_stem(path) {
            return Ok(Self::named(path.as_bytes()));
        }
        let mut od = Self::default();
        od.overlay(&StemReader::new(store, path))?;
        Ok(od)
    }

    fn overlay<S: VariableStore + ?Sized>(
        &mut self,
        reader: &StemReader<'_, S>,
    ) -> Result<(), MarshalError> {
        reader.load_int("VER", &mut self.version);
        reader.load_int("OT", &mut self.object_type);
        reader.load_fixed_string("ON", &mut self.object_name);
        reader.load_fixed_string("OQM", &mut self.object_qmgr_name);
        reader.load_fixed_string("DQN", &mut self.dynamic_q_name);
        reader.load_fixed_string("AUID", &mut self.alternate_user_id);

        reader.load_int("RP", &mut self.recs_present);
        reader.load_int("KDC", &mut self.known_dest_count);
        reader.load_int("UDC", &mut self.unknown_dest_count);
        reader.load_int("IDC", &mut self.invalid_dest_count);

        reader.load_bytes("ASID", &mut self.alternate_security_id);
        reader.load_fixed_string("RQN", &mut self.resolved_q_name);
        reader.load_fixed_string("RQMN", &mut self.resolved_qmgr_name);

        reader.load_counted_string("OS", &mut self.object_string)?;
        reader.load_counted_string("SS", &mut self.selection_string)?;
        reader.load_counted_string("ROS", &mut self.res_object_string)?;
        reader.load_int("RT", &mut self.resolved_type);
        Ok(())
    }

    fn emit<S: VariableStore + ?Sized>(&self, writer: &mut StemWriter<'_, S>) {
        writer.put_int("VER", self.version);
        writer.put_int("OT", self.object_type);
        writer.put_fixed_string("ON", &self.object_name);
        writer.put_fixed_string("OQM", &self.object_qmgr_name);
        writer.put_fixed_string("DQN", &self.dynamic_q_name);
        writer.put_fixed_string("AUID", &self.alternate_user_id);

        writer.put_int("RP", self.recs_present);
        writer.put_int("KDC", self.known_dest_count);
        writer.put_int("UDC", self.unknown_dest_count);
        writer.put_int("IDC", self.invalid_dest_count);

        writer.put_bytes("ASID", &self.alternate_security_id);
        writer.put_fixed_string("RQN", &self.resolved_q_name);
        writer.put_fixed_string("RQMN", &self.resolved_qmgr_name);

        writer.put_counted_string("OS", &self.object_string);
        writer.put_counted_string("SS", &self.selection_string);
        writer.put_counted_string("ROS", &self.res_object_string);
        writer.put_int("RT", self.resolved_type);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_plain_name_shortcut() {
        let mut store = MemoryStore::new();
        store.set_str("MYQUEUE.OT", "8");

        let od = ObjectDescriptor::to_record(&store, "MYQUEUE").unwrap();
        assert_eq!(od, ObjectDescriptor::named(b"MYQUEUE"));
        assert_eq!(&od.object_name[..8], b"MYQUEUE\0");
    }

    #[test]
    fn test_object_string_overlay() {
        let mut store = MemoryStore::new();
        store.set_str("OD.VER", "4");
        store.set_str("OD.OT", "8");
        store.set_str("OD.OS.0", "14");
        store.set_str("OD.OS.1", "SPORTS/RESULTS");

        let od = ObjectDescriptor::to_record(&store, "OD.").unwrap();
        assert_eq!(od.version, 4);
        assert_eq!(od.object_type, 8);
        assert_eq!(od.object_string.payload(), b"SPORTS/RESULTS");
        assert_eq!(&od.dynamic_q_name[..5], b"AMQ.*");
        assert!(!od.selection_string.is_allocated());
    }
}
