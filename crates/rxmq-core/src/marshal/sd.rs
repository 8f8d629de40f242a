use rxmq_wire::SubscriptionDescriptor;

use super::Marshal;
use crate::codec::{StemReader, StemWriter};
use crate::error::MarshalError;
use crate::store::VariableStore;

impl Marshal for SubscriptionDescriptor {
    const TAGS: &'static [&'static str] = &[
        "VER", "OPT", "ON", "AUID", "ASID", "SE", "OS.0", "OS.CCSID", "OS.1", "SN.0", "SN.CCSID",
        "SN.1", "SUD.0", "SUD.CCSID", "SUD.1", "SCID", "PP", "PAT", "PAID", "SS.0", "SS.CCSID",
        "SS.1", "SL", "ROS.0", "ROS.CCSID", "ROS.1",
    ];

    fn overlay<S: VariableStore + ?Sized>(
        &mut self,
        reader: &StemReader<'_, S>,
    ) -> Result<(), MarshalError> {
        reader.load_int("VER", &mut self.version);
        reader.load_int("OPT", &mut self.options);
        reader.load_fixed_string("ON", &mut self.object_name);
        reader.load_fixed_string("AUID", &mut self.alternate_user_id);
        reader.load_bytes("ASID", &mut self.alternate_security_id);
        reader.load_int("SE", &mut self.sub_expiry);
        reader.load_counted_string("OS", &mut self.object_string)?;
        reader.load_counted_string("SN", &mut self.sub_name)?;
        reader.load_counted_string("SUD", &mut self.sub_user_data)?;
        reader.load_bytes("SCID", &mut self.sub_correl_id);
        reader.load_int("PP", &mut self.pub_priority);
        reader.load_bytes("PAT", &mut self.pub_accounting_token);
        reader.load_fixed_string("PAID", &mut self.pub_appl_identity_data);
        reader.load_counted_string("SS", &mut self.selection_string)?;
        reader.load_int("SL", &mut self.sub_level);
        reader.load_counted_string("ROS", &mut self.res_object_string)?;
        Ok(())
    }

    fn emit<S: VariableStore + ?Sized>(&self, writer: &mut StemWriter<'_, S>) {
        writer.put_int("VER", self.version);
        writer.put_int("OPT", self.options);
        writer.put_fixed_string("ON", &self.object_name);
        writer.put_fixed_string("AUID", &self.alternate_user_id);
        writer.put_bytes("ASID", &self.alternate_security_id);
        writer.put_int("SE", self.sub_expiry);
        writer.put_counted_string("OS", &self.object_string);
        writer.put_counted_string("SN", &self.sub_name);
        writer.put_counted_string("SUD", &self.sub_user_data);
        writer.put_bytes("SCID", &self.sub_correl_id);
        writer.put_int("PP", self.pub_priority);
        writer.put_bytes("PAT", &self.pub_accounting_token);
        writer.put_fixed_string("PAID", &self.pub_appl_identity_data);
        writer.put_counted_string("SS", &self.selection_string);
        writer.put_int("SL", self.sub_level);
        writer.put_counted_string("ROS", &self.res_object_string);
    }
}
