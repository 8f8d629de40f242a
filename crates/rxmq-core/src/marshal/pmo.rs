use rxmq_wire::PutMessageOptions;

use super::Marshal;
use crate::codec::{StemReader, StemWriter};
use crate::error::MarshalError;
use crate::store::VariableStore;

impl Marshal for PutMessageOptions {
    const TAGS: &'static [&'static str] = &[
        "VER", "OPT", "TIME", "CON", "KDC", "UDC", "IDC", "RQN", "RQMN", // v1
        "RP", // v2
        "OMH", "NMH", "ACT", "PL", // v3
    ];

    fn overlay<S: VariableStore + ?Sized>(
        &mut self,
        reader: &StemReader<'_, S>,
    ) -> Result<(), MarshalError> {
        reader.load_int("VER", &mut self.version);
        reader.load_int("OPT", &mut self.options);
        reader.load_int("TIME", &mut self.timeout);
        reader.load_int("CON", &mut self.context);
        reader.load_int("KDC", &mut self.known_dest_count);
        reader.load_int("UDC", &mut self.unknown_dest_count);
        reader.load_int("IDC", &mut self.invalid_dest_count);
        reader.load_fixed_string("RQN", &mut self.resolved_q_name);
        reader.load_fixed_string("RQMN", &mut self.resolved_qmgr_name);
        reader.load_int("RP", &mut self.recs_present);
        reader.load_int64("OMH", &mut self.original_msg_handle);
        reader.load_int64("NMH", &mut self.new_msg_handle);
        reader.load_int("ACT", &mut self.action);
        reader.load_int("PL", &mut self.pub_level);
        Ok(())
    }

    fn emit<S: VariableStore + ?Sized>(&self, writer: &mut StemWriter<'_, S>) {
        writer.put_int("VER", self.version);
        writer.put_int("OPT", self.options);
        writer.put_int("TIME", self.timeout);
        writer.put_int("CON", self.context);
        writer.put_int("KDC", self.known_dest_count);
        writer.put_int("UDC", self.unknown_dest_count);
        writer.put_int("IDC", self.invalid_dest_count);
        writer.put_fixed_string("RQN", &self.resolved_q_name);
        writer.put_fixed_string("RQMN", &self.resolved_qmgr_name);
        writer.put_int("RP", self.recs_present);
        writer.put_int64("OMH", self.original_msg_handle);
        writer.put_int64("NMH", self.new_msg_handle);
        writer.put_int("ACT", self.action);
        writer.put_int("PL", self.pub_level);
    }
}
